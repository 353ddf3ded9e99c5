pub mod sqlite_users_repository;
