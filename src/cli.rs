// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "t v{} - capture cards into a Trello board from the command line",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    t [options] <title> [description]");
    println!("    t --help");
    println!();
    println!("OPTIONS:");
    println!("    -c <path>         Use a different configuration file.");
    println!("    -d, --debug       Log every pipeline step to stderr.");
    println!("    -h, --help        Show this help message.");
    println!();
    println!("TAG SYNTAX:");
    println!("    @label            Attach a label (repeatable, order kept)");
    println!("    ^list             Target list (last one wins, falls back to \"Inbox\")");
    println!("    #board            Target board (last one wins, falls back to the config)");
    println!();
    println!("    A sigil only counts at the start of a word: mail@example.com and a");
    println!("    lone @ stay in the text untouched. Tags may appear in the title, the");
    println!("    description, or both; description tags win for list and board.");
    println!();
    println!("EXAMPLES:");
    println!("    t \"Write report @work ^Today #Projects\"");
    println!("    t \"Call the plumber\" \"kitchen sink leaks @home\"");
    println!();
    println!("CONFIGURATION (JSON, default: OS config dir/trel/config.json):");
    println!("    {{");
    println!("        \"key\": \"API KEY\",");
    println!("        \"token\": \"API TOKEN\",");
    println!("        \"board\": \"DEFAULT BOARD\",");
    println!("        \"list\": \"Inbox\"");
    println!("    }}");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/trel");
    println!("    License:    GPL-3.0");
}
