use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use restaurant_orders::config::ServerConfig;
use restaurant_orders::db::{establish_connection_pool, run_pending_migrations};
use restaurant_orders::repository::DieselRepository;
use restaurant_orders::routes::{form_config, json_config};
use restaurant_orders::routes::api::{api_v1_delivery, api_v1_dishes, api_v1_place_order};
use restaurant_orders::routes::main::{
    add_order, show_hero, show_index, show_login, show_menu, show_orders, show_register,
    show_tracking,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();
    let secret_key = config.cookie_key();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if config.run_migrations {
        match run_pending_migrations(&pool) {
            Ok(0) => {}
            Ok(applied) => log::info!("Applied {applied} database migration(s)"),
            Err(e) => {
                log::error!("Failed to run database migrations: {e}");
                std::process::exit(1);
            }
        }
    }

    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new(&config.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_hero)
            .service(show_menu)
            .service(show_tracking)
            .service(show_orders)
            .service(add_order)
            .service(show_register)
            .service(show_login)
            .service(api_v1_dishes)
            .service(api_v1_place_order)
            .service(api_v1_delivery)
            .app_data(form_config())
            .app_data(json_config())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
