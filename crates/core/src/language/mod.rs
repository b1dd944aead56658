pub mod g2p;
pub mod phoneme;
pub mod tokenize;
