//! システム全体で使用される定数定義

/// 外部エンジン (ripgrep) の実行に関する設定
pub mod exec {
    /// Program name looked up on `PATH` when no explicit path is configured
    pub const DEFAULT_RG_PROGRAM: &str = "rg";

    /// 1回の実行でキャプチャする標準出力の上限（バイト）
    /// 20MB
    pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 20 * 1024 * 1024;

    /// 標準出力を読み取る際のチャンクサイズ
    pub const READ_CHUNK_BYTES: usize = 8 * 1024;
}

/// 設定ファイル
pub mod file {
    /// Conventional file name for the optional TOML config
    pub const CONFIG_FILE_NAME: &str = "rgbridge.toml";
}
