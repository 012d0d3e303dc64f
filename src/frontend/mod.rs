mod blog;
mod contact;
mod dom;
mod error_page;
mod home;
mod logger;
mod portfolio;
mod widgets;

use error_page::ErrorPage;
use home::HomePage;

/// Mounts whichever page the host document provides a root for.
pub fn run() {
    logger::init();

    let document = dom::document();
    let mount = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));

    if let Some(root) = mount("error-app") {
        yew::Renderer::<ErrorPage>::with_root(root).render();
        return;
    }

    yew::Renderer::<HomePage>::with_root(mount("app").expect("missing #app mount point")).render();
}
