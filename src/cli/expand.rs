use crate::{client::UrlClient, view::ViewState, warning};

use super::{render, spinner};

pub async fn expand(client: &UrlClient, view: ViewState, short_url: &str, open: bool) -> ViewState {
    let (view, ticket) = view.issue();

    let pb = spinner("Resolving short URL...");
    let result = client.expand(short_url).await;
    pb.finish_and_clear();

    if let Err(e) = &result {
        if !e.is_not_found() {
            warning!("Lookup of {} failed: {}", short_url, e.reason());
        }
    }

    let resolved = result.is_ok();
    let view = view.apply_expanded(ticket, short_url, result);
    render(&view);

    if open && resolved && webbrowser::open(view.full_url()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            view.full_url()
        );
    }

    view
}
