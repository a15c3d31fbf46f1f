use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Pool;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{DatabaseSettings, Settings},
    db_interaction::add_sample_data,
    routes::{
        customer::{list_customers, post_customer},
        dashboard::dashboard_stats,
        health_check,
        order::{get_order, list_orders, post_order, update_order}
    },
    utils::{json_error_handler, path_error_handler, query_error_handler, DbPool}
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Creates the tables, optionally seeds demo data, then binds the server.
    // A configured port of 0 picks a random free port, reported in `port`.
    pub fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)
            .context("Failed to build connection pool")?;

        {
            let mut conn = pool.get()
                .context("Failed to get connection from pool")?;

            run_migrations(&mut conn)?;

            if settings.application.seed_demo_data && add_sample_data(&mut conn)? {
                tracing::info!("Seeded demo data");
            }
        }

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind address")?;
        let port = listener.local_addr()?.port();

        tracing::info!(host = %settings.application.host, port, "Starting server");

        let server = run(listener, pool)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, r2d2::Error> {
    Pool::builder()
        .max_size(settings.max_connections)
        .build(ConnectionManager::<PgConnection>::new(settings.get_database_table_url()))
}

pub fn run_migrations(connection: &mut PgConnection) -> Result<(), anyhow::Error> {
    connection.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(())
}

pub fn run(listener: TcpListener, pool: DbPool) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(pool.clone())
            .route("/", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/customers", web::post().to(post_customer))
                    .route("/customers", web::get().to(list_customers))
                    .route("/orders", web::post().to(post_order))
                    .route("/orders", web::get().to(list_orders))
                    .route("/orders/{order_id}", web::get().to(get_order))
                    .route("/orders/{order_id}/status", web::put().to(update_order))
                    .route("/dashboard/stats", web::get().to(dashboard_stats))
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
