pub mod net;
pub mod run;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
