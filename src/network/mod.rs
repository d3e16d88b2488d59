pub mod xor_net;

pub use xor_net::{Gradients, XorNet};
