mod repository;

pub use repository::InMemoryHealthRepository;
