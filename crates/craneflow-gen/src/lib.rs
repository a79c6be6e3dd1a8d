//! CraneFlow 生成パイプライン
//!
//! 解決済みのサービス設定から成果物を生成します。
//!
//! # 概要
//!
//! - **materialize**: 公開ファイルをプロジェクトへ複製し、描画可能な
//!   構造体へ変換（索引データは不変のまま）
//! - **render**: Dockerfile と compose マニフェストをテンプレートから描画
//! - **generator**: 解決 → 実体化 → 描画 を順に実行するオーケストレーター

pub mod engine;
pub mod error;
pub mod generator;
pub mod materialize;
pub mod render;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use materialize::*;
pub use render::*;
