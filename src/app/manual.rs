//! Usage manual printed when the positionals are missing

use colored::Colorize;

const SETUP_STEPS: &[&str] = &[
    "Place the appverinc executable in the solution directory, next to the .sln file.",
    "Add it to the project's pre-build event (Project Properties -> Build Events):",
];

const PRE_BUILD_COMMAND: &str = "\"$(SolutionDir)appverinc\" $(ConfigurationName) \"$(ProjectName)\"";

/// Render the manual; `use_color` highlights headings and the command line
pub fn manual_text(use_color: bool) -> String {
    let heading = |text: &str| {
        if use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };
    let command = if use_color {
        PRE_BUILD_COMMAND.cyan().to_string()
    } else {
        PRE_BUILD_COMMAND.to_string()
    };

    let mut out = String::new();
    out.push_str(&heading("> How to use:"));
    out.push('\n');
    out.push_str(&format!("1. {}\n", SETUP_STEPS[0]));
    out.push_str(&format!("2. {}\n", SETUP_STEPS[1]));
    out.push_str(&format!("\n    {}\n\n", command));
    out.push_str(
        "3. Every Release build now bumps AssemblyVersion and AssemblyFileVersion in\n   <Project>/Properties/AssemblyInfo.cs (x.y.z: build rolls over after 999,\n   minor after 9).\n",
    );
    out.push('\n');
    out.push_str(&heading("Arguments:"));
    out.push('\n');
    out.push_str("  MODE     build mode; only release modes (default: Release) bump the version\n");
    out.push_str("  PROJECT  name of the project directory holding Properties/AssemblyInfo.cs\n");
    out.push('\n');
    out.push_str("Run with --help for all options.\n");
    out
}

/// Print the manual to standard output
pub fn print_manual(use_color: bool) {
    print!("{}", manual_text(use_color));
}
