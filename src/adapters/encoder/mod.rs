pub mod qrcode_png;
