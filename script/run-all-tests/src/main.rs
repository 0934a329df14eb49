//! Runs `wasm-pack test` for every member of the workspace. Extra arguments are passed to each
//! run, e.g. `run-all-tests --headless --firefox`. Exits with failure if any member fails.

use std::env;
use std::fs;
use std::process;
use std::process::Command;

fn workspace_members(cargo_toml:&toml::Value) -> Result<Vec<String>,String> {
    let members = cargo_toml.get("workspace").and_then(|workspace| workspace.get("members"));
    let members = members.and_then(toml::Value::as_array).ok_or("Missing workspace members.")?;
    members.iter().map(|member| {
        member.as_str().map(String::from).ok_or_else(|| "Workspace member is not a string.".into())
    }).collect()
}

fn run() -> Result<bool,String> {
    let manifest   = fs::read_to_string("Cargo.toml").map_err(|err| err.to_string())?;
    let cargo_toml = manifest.parse::<toml::Value>().map_err(|err| err.to_string())?;
    let arguments  = env::args().skip(1).collect::<Vec<_>>();
    let mut passed = true;
    for member in workspace_members(&cargo_toml)? {
        let status = Command::new("wasm-pack").arg("test").arg(&member).args(&arguments).status();
        let status = status.map_err(|err| format!("Cannot run wasm-pack: {}", err))?;
        println!("Tests of {} finished with {}.", member, status);
        passed &= status.success();
    }
    Ok(passed)
}

fn main() {
    match run() {
        Ok(true)  => {}
        Ok(false) => process::exit(1),
        Err(err)  => {
            eprintln!("{}", err);
            process::exit(2)
        }
    }
}
