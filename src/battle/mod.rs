pub mod math;
pub mod policy;
pub mod resolver;
pub mod session;
pub mod switching;

#[cfg(test)]
mod tests;
