use axum::response::Html;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dinnercaster3</title>
</head>
<body>
    <main>
        <div>Dinnercaster3</div>
    </main>
</body>
</html>
"#;

/// Landing page.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
