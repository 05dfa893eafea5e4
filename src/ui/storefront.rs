/// Page-wide storefront context shared by event handlers and exported entry
/// points

use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::modal::{ModalController, ProductDescriptor};
use crate::navigation::navigate;
use crate::storage::{CartStorage, LocalStorage, MemoryStorage};
use crate::store::CartStore;
use crate::timer::sleep;
use crate::ui::badge::DomBadge;
use crate::ui::modal::ModalView;
use crate::ui::{dom, favorites, icons, toast};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

pub type PageStore = CartStore<Box<dyn CartStorage>, DomBadge>;

thread_local! {
    static STOREFRONT: RefCell<Option<Rc<Storefront>>> = const { RefCell::new(None) };
}

pub struct Storefront {
    config: StorefrontConfig,
    store: RefCell<PageStore>,
    modal: RefCell<ModalController>,
    modal_view: Option<ModalView>,
}

impl Storefront {
    /// Open storage, hydrate the cart and register the context for this page.
    /// Returns `None` if a storefront is already installed.
    pub fn install(config: StorefrontConfig) -> Option<Rc<Self>> {
        if Self::current().is_some() {
            log::warn!("Storefront already started");
            return None;
        }

        let storage: Box<dyn CartStorage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; cart will not survive this page", e);
                Box::new(MemoryStorage::new())
            }
        };

        let mut store = CartStore::new(
            storage,
            DomBadge::new(config.badge_selector.clone()),
            config.storage_key.clone(),
        );
        store.hydrate();

        let modal_view = dom::document().and_then(|d| ModalView::find(&d, &config.placeholder_image));

        let storefront = Rc::new(Storefront {
            config,
            store: RefCell::new(store),
            modal: RefCell::new(ModalController::new()),
            modal_view,
        });
        STOREFRONT.with(|slot| *slot.borrow_mut() = Some(storefront.clone()));
        Some(storefront)
    }

    pub fn current() -> Option<Rc<Self>> {
        STOREFRONT.with(|slot| slot.borrow().clone())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(self.store.borrow().cart())
    }

    pub fn cart_count(&self) -> u64 {
        self.store.borrow().cart().total_quantity()
    }

    pub fn refresh_badge(&self) {
        self.store.borrow().refresh_badge();
    }

    pub fn open_product(&self, trigger: &Element) {
        let Some(view) = &self.modal_view else {
            log::debug!("No product modal on this page");
            return;
        };

        let product = ProductDescriptor::from_element(trigger);
        log::debug!("Opening product modal for {:?}", product);

        view.render(&product, &self.config.currency_prefix);
        {
            let mut modal = self.modal.borrow_mut();
            let working_set = modal.open(&product);
            view.store_working_set(working_set);
            view.set_quantity(modal.stepper().value());
        }
        view.show();
        icons::replace();
    }

    pub fn close_modal(&self) {
        let Some(view) = &self.modal_view else {
            return;
        };
        if self.modal.borrow_mut().close() {
            view.hide();
        }
    }

    pub fn increase_quantity(&self) {
        if let Some(view) = &self.modal_view {
            let mut modal = self.modal.borrow_mut();
            modal.sync_quantity(&view.quantity());
            view.set_quantity(modal.increase_quantity());
        }
    }

    pub fn decrease_quantity(&self) {
        if let Some(view) = &self.modal_view {
            let mut modal = self.modal.borrow_mut();
            modal.sync_quantity(&view.quantity());
            view.set_quantity(modal.decrease_quantity());
        }
    }

    /// Put the modal's product into the cart, toast and close. Returns
    /// whether anything was added.
    pub fn add_from_modal(&self) -> bool {
        let Some(view) = &self.modal_view else {
            return false;
        };

        // The modal stays open until the add succeeds.
        let order = {
            let mut modal = self.modal.borrow_mut();
            modal.sync_quantity(&view.quantity());
            modal.order()
        };
        let Some(order) = order else {
            log::debug!("Add to cart ignored: modal is closed");
            return false;
        };

        let message = order.added_message();
        if let Err(e) = self.store.borrow_mut().add_item(order.product, order.quantity) {
            log::warn!("Could not add to cart: {}", e);
            return false;
        }

        self.close_modal();
        self.notify(&message);
        true
    }

    /// Add to cart, then go to the cart page once the toast had a moment to
    /// show.
    pub fn buy_now(&self) {
        if !self.add_from_modal() {
            return;
        }

        let path = self.config.cart_path.clone();
        let delay = self.config.buy_now_delay_ms;
        spawn_local(async move {
            sleep(delay).await;
            navigate(&path);
        });
    }

    pub fn toggle_favorite_modal(&self) {
        let button = dom::document()
            .and_then(|d| d.query_selector(favorites::FAVORITE_MODAL_BUTTON).ok().flatten());

        if let Some(button) = button {
            let favorited = favorites::toggle(&button);
            self.notify(favorites::wishlist_message(favorited));
        }
    }

    pub fn notify(&self, message: &str) {
        toast::show(message, self.config.toast);
    }
}

/// Run `f` against the installed storefront; no-op before `startStorefront`.
pub fn with_storefront<R>(f: impl FnOnce(&Storefront) -> R) -> Option<R> {
    Storefront::current().map(|storefront| f(&storefront))
}
