use tabled::Table;

use crate::{
    client::UrlClient,
    types::UrlTableRow,
    view::ViewState,
    warning,
};

use super::{render, spinner};

pub async fn shorten(client: &UrlClient, view: ViewState, full_url: &str) -> ViewState {
    let (view, ticket) = view.issue();

    let pb = spinner("Shortening URL...");
    let result = client.shorten(full_url).await;
    pb.finish_and_clear();

    let short_url = match result {
        Ok(created) => {
            println!("{}", Table::new([UrlTableRow::from(&created)]));
            Ok(created.short_url.unwrap_or_default())
        }
        Err(e) => {
            warning!("Shortening {} failed: {}", full_url, e);
            Err(e)
        }
    };

    let view = view.apply_shortened(ticket, short_url);
    render(&view);
    view
}
