use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{
    BeltRank, LineItemStatus, OrderStatus, PassType, PaymentStatus, StudentPassStatus, UserRole,
};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::user::get_profile,
        handlers::user::update_profile,
        handlers::academy::list_academies,
        handlers::academy::get_academy,
        handlers::academy::create_academy,
        handlers::pass::list_passes,
        handlers::pass::create_pass,
        handlers::pass::update_pass,
        handlers::pass::delete_pass,
        handlers::class_schedule::list_schedules,
        handlers::class_schedule::create_schedule,
        handlers::class_schedule::delete_schedule,
        handlers::order::create_order,
        handlers::order::list_orders,
        handlers::order::confirm_order,
        handlers::order_line_item::update_line_item_status,
        handlers::order_line_item::list_academy_line_items,
        handlers::booking::create_booking,
        handlers::booking::list_bookings,
        handlers::student_pass::list_student_passes,
        handlers::review::list_reviews,
        handlers::review::create_review,
        handlers::review::update_review,
        handlers::review::delete_review,
    ),
    components(
        schemas(
            RegisterUserRequest,
            LoginRequest,
            RefreshTokenRequest,
            UpdateProfileRequest,
            UserResponse,
            AuthResponse,
            UserRole,
            BeltRank,
            CreateAcademyRequest,
            AcademyResponse,
            CreatePassRequest,
            UpdatePassRequest,
            PassResponse,
            PassType,
            CreateClassScheduleRequest,
            ClassScheduleResponse,
            CartItem,
            CreateOrderRequest,
            OrderResponse,
            OrderLineItemResponse,
            OrderStatus,
            LineItemStatus,
            UpdateLineItemStatusRequest,
            LineItemQuery,
            PaymentResponse,
            PaymentStatus,
            StudentPassResponse,
            StudentPassStatus,
            BookingResponse,
            CreateReviewRequest,
            UpdateReviewRequest,
            ReviewResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and authentication API"),
        (name = "user", description = "Profile API"),
        (name = "academy", description = "Academy management API"),
        (name = "pass", description = "Pass catalog API"),
        (name = "class_schedule", description = "Class schedule API"),
        (name = "order", description = "Order and settlement API"),
        (name = "order_line_item", description = "Line item approval API"),
        (name = "booking", description = "Booking API"),
        (name = "student_pass", description = "Student pass API"),
        (name = "review", description = "Review API"),
    ),
    info(
        title = "Matpass Backend API",
        version = "1.0.0",
        description = "Academy pass marketplace REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
