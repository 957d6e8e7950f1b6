pub mod airport;
