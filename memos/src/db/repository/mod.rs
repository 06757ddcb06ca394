mod memos;

pub use memos::MemoRepository;
