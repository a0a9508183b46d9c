pub mod commentary;
pub mod engine;
pub mod event;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
