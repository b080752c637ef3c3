use utoipa::openapi::server::Server;
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::OpenApi;

pub fn configure_openapi(mut openapi: OpenApi, public_url: &str) -> OpenApi {
    openapi.info.title = "Booking Admin API".to_string();
    openapi.info.description = Some(
        "Dashboard analytics, visitor page views and site settings for the booking admin area"
            .to_string(),
    );

    openapi.servers = Some(vec![Server::new(public_url)]);

    openapi.tags = Some(vec![
        TagBuilder::new()
            .name("analytics")
            .description(Some("Dashboard and visitor analytics"))
            .build(),
        TagBuilder::new()
            .name("settings")
            .description(Some("Key/value site settings"))
            .build(),
    ]);

    openapi
}
