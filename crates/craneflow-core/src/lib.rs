//! CraneFlow コア — サービスカタログの読み込みと選択の解決
//!
//! サービス定義（php 8.2, mysql 8.0 など）のレジストリをメモリ上の
//! インデックスに読み込み、ユーザーの {サービス → バージョン} 選択を
//! 検証済みの設定オブジェクトへ解決します。
//!
//! # 概要
//!
//! - **Registry**: レジストリディレクトリから読み込んだサービス定義の索引
//! - **resolve**: 選択マップを all-or-nothing で検証済み設定へ解決
//! - **validate**: VersionConfig に対する必須項目チェック（ルール表）

pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod validate;

pub use error::*;
pub use model::*;
pub use registry::*;
pub use resolver::*;
pub use validate::*;
