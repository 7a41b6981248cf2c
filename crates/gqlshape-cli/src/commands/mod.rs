pub mod exec;
pub mod input;

#[cfg(test)]
mod exec_tests;
#[cfg(test)]
mod input_tests;
