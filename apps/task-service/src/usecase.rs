//! # ユースケース層
//!
//! Task Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時計を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換に徹し、手順はユースケースに集約

pub mod task;

pub use task::TaskUseCaseImpl;
