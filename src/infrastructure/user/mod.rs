mod repository;

pub use repository::InMemoryUserRepository;
