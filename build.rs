#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rcheckin.ico must exist for Windows builds
    let mut res = WindowsResource::new();
    res.set_icon("res/rcheckin.ico")
        .set("FileDescription", "rCheckin desk check-in terminal")
        .set("ProductName", "rCheckin")
        .set("OriginalFilename", "rcheckin.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
