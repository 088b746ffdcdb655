use askama::Template;
use axum::{extract::Extension, response::Html};
use time::OffsetDateTime;

use crate::{directory::Directory, server::filters};

pub async fn info(Extension(directory): Extension<&'static Directory>) -> Html<String> {
    let summary = directory.summary();

    let page = InfoPage {
        count: summary.count,
        now: summary.now,
    };

    Html(page.render().unwrap())
}

#[derive(Template)]
#[template(path = "info.html")]
struct InfoPage {
    count: usize,
    now: OffsetDateTime,
}
