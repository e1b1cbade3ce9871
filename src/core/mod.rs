pub mod ignore;
pub mod walk;
