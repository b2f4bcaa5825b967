pub mod completions;
pub mod console;

pub use completions::CompletionsCommand;
pub use console::ConsoleCommand;
