// Mock Interview: role/level setup followed by a fixed question walk-through.

pub mod handlers;
pub mod session;
