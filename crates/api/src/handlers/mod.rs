pub mod cosplay;
