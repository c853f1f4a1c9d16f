pub mod builder;
pub mod discord;
pub mod settings;
pub mod sticky;
pub mod verification;
pub mod wizard;

#[cfg(test)]
mod test;
