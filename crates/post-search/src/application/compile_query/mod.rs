mod query_compiler;

pub use query_compiler::QueryCompiler;
