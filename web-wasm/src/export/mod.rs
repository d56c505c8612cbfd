//! グラフ画像化・ダウンロード

pub mod capture;
