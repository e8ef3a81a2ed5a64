use cmdkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let git = cmd("git");
    let log = git.arg("log").opt("max_count", 5).opt("format", "%h %s");
    match log.output() {
        Ok(out) => print!("{}", out),
        // Not a repository, or no commits yet: show what git said.
        Err(Error::Status(e)) => eprintln!("{}", e),
        Err(e) => return Err(e),
    }

    let meta: serde_json::Value = cmdkit::cmd!("cargo", "metadata"; format_version = 1, no_deps = true).json()?;
    for pkg in meta["packages"].as_array().into_iter().flatten() {
        println!("{} {}", pkg["name"], pkg["version"]);
    }

    let status = git.args(["diff", "--quiet"]).status()?;
    println!("worktree clean: {}", status.success());
    Ok(())
}
