pub mod util;

#[cfg(test)]
mod point;
