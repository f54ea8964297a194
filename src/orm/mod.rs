pub mod songs;

pub type Type = diesel::pg::Pg;
