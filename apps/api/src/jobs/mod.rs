// Job postings and their candidates. Storage is in-process until remote
// persistence lands; nothing survives a restart.

pub mod handlers;
pub mod store;
