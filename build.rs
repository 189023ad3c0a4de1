use std::env;

// SIMD backends the vector kernel can be compiled against
#[derive(PartialEq, Eq, Debug)]
struct SimdBackend {
    name: &'static str,
    target_arch: &'static str,
    target_feature: &'static str,
    cfg_flag: &'static str,
}

impl SimdBackend {
    // Ordered by preference: the first backend matching the target wins
    fn backends() -> Vec<SimdBackend> {
        vec![
            SimdBackend {
                name: "sse2 (x86_64)",
                target_arch: "x86_64",
                target_feature: "sse2",
                cfg_flag: "sse",
            },
            SimdBackend {
                name: "sse2 (x86)",
                target_arch: "x86",
                target_feature: "sse2",
                cfg_flag: "sse",
            },
            SimdBackend {
                name: "neon",
                target_arch: "aarch64",
                target_feature: "neon",
                cfg_flag: "neon",
            },
        ]
    }

    fn matches(&self, target_arch: &str, target_features: &[&str]) -> bool {
        self.target_arch == target_arch && target_features.contains(&self.target_feature)
    }
}

fn main() {
    println!("cargo::rustc-check-cfg=cfg(sse)");
    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MANDELPLOT_FORCE_FALLBACK");

    // Cargo exposes the *target* configuration to build scripts, so this also
    // does the right thing when cross-compiling.
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let target_features: Vec<&str> = target_features.split(',').collect();

    let forced_fallback = env::var_os("MANDELPLOT_FORCE_FALLBACK").is_some();

    let cfg_flag = if forced_fallback {
        "fallback"
    } else {
        SimdBackend::backends()
            .iter()
            .find(|backend| backend.matches(&target_arch, &target_features))
            .map(|backend| {
                println!("selected backend: {}", backend.name);
                backend.cfg_flag
            })
            .unwrap_or("fallback")
    };

    println!("cargo:rustc-cfg={cfg_flag}");
}
