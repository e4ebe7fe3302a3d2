//! CLI module

mod commands;
mod prompts;

pub use commands::Cli;
pub use prompts::{
    TERMS_OF_USE, candidate_label, print_candidates, print_scan_problems, run_interactive,
    run_list, run_recover_all,
};
