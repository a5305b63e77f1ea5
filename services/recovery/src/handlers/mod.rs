pub mod health;
pub mod recovery;
