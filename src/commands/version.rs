//! Version command implementation

/// Build metadata reported by `--version`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub build_date: &'static str,
}

/// Metadata baked in at compile time; `CLASP_GIT_SHA` and
/// `CLASP_BUILD_DATE` are read from the build environment
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    git_sha: match option_env!("CLASP_GIT_SHA") {
        Some(sha) => sha,
        None => "unknown",
    },
    build_date: match option_env!("CLASP_BUILD_DATE") {
        Some(date) => date,
        None => "",
    },
};

/// Run version command
pub fn run(info: &BuildInfo) {
    println!("{}", version_line(info));
}

fn version_line(info: &BuildInfo) -> String {
    format!(
        "clasp version {} (build: {}, date: {})",
        info.version, info.git_sha, info.build_date
    )
}
