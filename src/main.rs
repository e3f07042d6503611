use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use matpass_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let auth_service = AuthService::new(pool.clone(), jwt_service.clone());
    let user_service = UserService::new(pool.clone());
    let academy_service = AcademyService::new(pool.clone());
    let pass_service = PassService::new(pool.clone());
    let class_schedule_service = ClassScheduleService::new(pool.clone());
    let order_service = OrderService::new(pool.clone());
    let order_line_item_service = OrderLineItemService::new(pool.clone());
    let payment_service = PaymentService::new(pool.clone());
    let booking_service = BookingService::new(pool.clone());
    let student_pass_service = StudentPassService::new(pool.clone());
    let review_service = ReviewService::new(pool.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(academy_service.clone()))
            .app_data(web::Data::new(pass_service.clone()))
            .app_data(web::Data::new(class_schedule_service.clone()))
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(order_line_item_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .app_data(web::Data::new(booking_service.clone()))
            .app_data(web::Data::new(student_pass_service.clone()))
            .app_data(web::Data::new(review_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::user_config)
                    .configure(handlers::academy_config)
                    .configure(handlers::pass_config)
                    .configure(handlers::class_schedule_config)
                    .configure(handlers::order_config)
                    .configure(handlers::order_line_item_config)
                    .configure(handlers::booking_config)
                    .configure(handlers::student_pass_config)
                    .configure(handlers::review_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
