/// Native preview of the project modal.
///
/// `folio-preview` lists the catalog; `folio-preview <key> [image]` prints the
/// modal markup for that project as it would be inserted into the page.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio::{render, ProjectCatalog, SiteConfig};

    let config = SiteConfig::load_from_default_path().unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let catalog = ProjectCatalog::builtin();
    let mut args = std::env::args().skip(1);

    let Some(key) = args.next() else {
        println!("{} projects:", catalog.len());
        for key in catalog.keys() {
            if let Some(record) = catalog.lookup(key) {
                println!("  {:<10} {} ({} images)", key, record.title, record.image_count());
            }
        }
        return;
    };

    let index = match args.next().map(|arg| arg.parse::<usize>()) {
        None => 0,
        Some(Ok(index)) => index,
        Some(Err(e)) => {
            eprintln!("Invalid image index: {}", e);
            std::process::exit(2);
        }
    };

    let Some(record) = catalog.lookup(&key) else {
        eprintln!("Unknown project '{}'", key);
        std::process::exit(1);
    };

    if index >= record.image_count().max(1) {
        log::warn!(
            "Image {} out of range for '{}', showing the last image",
            index,
            key
        );
    }

    let view = render(record, index, &config.keybindings);
    println!("<h2 id=\"modalTitle\">{}</h2>", folio_ui::escape_html(&view.title));
    println!("<div id=\"modalMeta\">{}</div>", view.meta.to_html());
    println!("<div id=\"modalBody\">{}</div>", view.body.to_html());
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
