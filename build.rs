//! Build script to compile the C reference reductions.
//!
//! The C sources are always built as position-independent code. With the
//! `openmp` feature, `-fopenmp` is added when the compiler accepts it and a
//! test program against the matching OpenMP runtime links; otherwise the C
//! sources are built serially.

use std::env;
use std::fs;
use std::path::PathBuf;

const OPENMP_PROBE: &str = "#include <omp.h>\nint main(void) { return omp_get_max_threads() > 0 ? 0 : 1; }\n";

/// Compile and link a tiny OpenMP program with `-l<runtime>`.
/// The program is never run, so this also holds when cross-compiling.
fn openmp_runtime_links(compiler: &cc::Tool, runtime: &str) -> bool {
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return false;
    };
    let src = out_dir.join("omp_probe.c");
    let exe = out_dir.join("omp_probe");
    if fs::write(&src, OPENMP_PROBE).is_err() {
        return false;
    }

    let mut cmd = compiler.to_command();
    cmd.arg("-fopenmp")
        .arg(&src)
        .arg("-o")
        .arg(&exe)
        .arg(format!("-l{}", runtime));

    matches!(cmd.output(), Ok(out) if out.status.success())
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rustc-check-cfg=cfg(c_openmp_active)");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_OPENMP");

    let probe = cc::Build::new();
    let compiler = match probe.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(e) => {
            println!("cargo:warning=No C compiler found ({}). C implementations disabled.", e);
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        "Clang"
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C implementations disabled.");
        return;
    };

    let mut build = cc::Build::new();

    // Auto-detect all C files in src/ directory
    let c_files = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect::<Vec<_>>(),
        Err(e) => {
            println!("cargo:warning=Invalid glob pattern for C sources: {}", e);
            return;
        }
    };

    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    build.pic(true).opt_level(3).warnings(false);

    let want_openmp = env::var_os("CARGO_FEATURE_OPENMP").is_some();
    let mut openmp_runtime = None;

    if want_openmp {
        if compiler.is_like_msvc() {
            build.flag("/openmp");
            openmp_runtime = Some(None);
        } else if build.is_flag_supported("-fopenmp").unwrap_or(false) {
            let runtime = if compiler.is_like_clang() { "omp" } else { "gomp" };
            if openmp_runtime_links(&compiler, runtime) {
                build.flag("-fopenmp");
                openmp_runtime = Some(Some(runtime));
            } else {
                println!("cargo:warning=OpenMP runtime lib{} not linkable. C implementation built without OpenMP.", runtime);
            }
        } else {
            println!("cargo:warning={} does not accept -fopenmp. C implementation built without OpenMP.", compiler_name);
        }
    }

    if let Err(e) = build.try_compile("reduce_c") {
        println!("cargo:warning=C compilation failed ({}). C implementations disabled.", e);
        return;
    }

    if let Some(runtime) = openmp_runtime {
        if let Some(lib) = runtime {
            println!("cargo:rustc-link-lib={}", lib);
        }
        println!("cargo:rustc-cfg=c_openmp_active");
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
