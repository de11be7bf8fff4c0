use std::sync::Arc;

use logger::TracingLogger;
use memstore::cart::store::CartStoreInMemory;
use memstore::catalog::repository::CatalogRepositoryInMemory;
use memstore::order::repository::OrderRepositoryInMemory;
use memstore::preferences::file_store::PreferenceFileStore;
use memstore::seed::Dataset;
use memstore::session::store::SessionStoreInMemory;
use memstore::user::repository::UserRepositoryInMemory;
use memstore::wishlist::store::WishlistStoreInMemory;

use business::application::admin::get_dashboard::GetDashboardUseCaseImpl;
use business::application::auth::current_user::CurrentUserUseCaseImpl;
use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_quantity::SetCartQuantityUseCaseImpl;
use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_related::GetRelatedProductsUseCaseImpl;
use business::application::catalog::get_trending::GetTrendingProductsUseCaseImpl;
use business::application::order::get_for_user::GetOrdersForUserUseCaseImpl;
use business::application::preferences::get_theme::GetThemeUseCaseImpl;
use business::application::preferences::toggle_theme::ToggleThemeUseCaseImpl;
use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetWishlistUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    pub account_api: crate::api::account::routes::AccountApi,
    pub admin_api: crate::api::admin::routes::AdminApi,
    pub preferences_api: crate::api::preferences::routes::PreferencesApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters: the seeded dataset, the session
        // stores, and the theme preference file.
        let dataset = Dataset::seed();
        let catalog_repository = Arc::new(CatalogRepositoryInMemory::new(dataset.products));
        let user_repository = Arc::new(UserRepositoryInMemory::new(dataset.users));
        let order_repository = Arc::new(OrderRepositoryInMemory::new(dataset.orders));
        let cart_store = Arc::new(CartStoreInMemory::new());
        let wishlist_store = Arc::new(WishlistStoreInMemory::new());
        let session_store = Arc::new(SessionStoreInMemory::new());
        let preference_store = Arc::new(PreferenceFileStore::new(
            config.preferences_path.clone(),
        ));

        // Catalog use cases
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_related_use_case = Arc::new(GetRelatedProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_trending_use_case = Arc::new(GetTrendingProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            catalog: catalog_repository.clone(),
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let set_quantity_use_case = Arc::new(SetCartQuantityUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            store: cart_store,
            logger: logger.clone(),
        });

        // Wishlist use cases
        let get_wishlist_use_case = Arc::new(GetWishlistUseCaseImpl {
            store: wishlist_store.clone(),
            logger: logger.clone(),
        });
        let add_to_wishlist_use_case = Arc::new(AddToWishlistUseCaseImpl {
            catalog: catalog_repository.clone(),
            store: wishlist_store.clone(),
            logger: logger.clone(),
        });
        let remove_from_wishlist_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            store: wishlist_store,
            logger: logger.clone(),
        });

        // Account use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            users: user_repository.clone(),
            session: session_store.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            session: session_store.clone(),
            logger: logger.clone(),
        });
        let current_user_use_case = Arc::new(CurrentUserUseCaseImpl {
            session: session_store,
            logger: logger.clone(),
        });
        let orders_use_case = Arc::new(GetOrdersForUserUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });

        // Admin use cases
        let dashboard_use_case = Arc::new(GetDashboardUseCaseImpl {
            catalog: catalog_repository.clone(),
            users: user_repository.clone(),
            orders: order_repository.clone(),
            logger: logger.clone(),
        });

        // Preference use cases
        let get_theme_use_case = Arc::new(GetThemeUseCaseImpl {
            store: preference_store.clone(),
            logger: logger.clone(),
        });
        let toggle_theme_use_case = Arc::new(ToggleThemeUseCaseImpl {
            store: preference_store,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            browse_use_case,
            get_by_id_use_case,
            get_related_use_case,
            get_trending_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            set_quantity_use_case,
            remove_cart_item_use_case,
            checkout_use_case,
        );

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            get_wishlist_use_case,
            add_to_wishlist_use_case,
            remove_from_wishlist_use_case,
        );

        let account_api = crate::api::account::routes::AccountApi::new(
            login_use_case,
            logout_use_case,
            current_user_use_case.clone(),
            orders_use_case,
        );

        let admin_api = crate::api::admin::routes::AdminApi::new(
            dashboard_use_case,
            current_user_use_case,
            catalog_repository,
            user_repository,
            order_repository,
        );

        let preferences_api = crate::api::preferences::routes::PreferencesApi::new(
            get_theme_use_case,
            toggle_theme_use_case,
        );

        Self {
            health_api,
            catalog_api,
            cart_api,
            wishlist_api,
            account_api,
            admin_api,
            preferences_api,
        }
    }
}
