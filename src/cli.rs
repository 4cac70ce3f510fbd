use clap::Parser;

/// Takes no arguments; always prints the current working directory.
#[derive(Parser, Debug)]
#[command(name = "dirtree", version)]
#[command(about = "Print the current directory as an indented tree", long_about = None)]
pub struct Cli {}
