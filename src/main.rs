#[cfg(feature = "csr")]
fn main() {
    use register_form::App;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Browser entry point; build with `trunk serve --features csr`
}
