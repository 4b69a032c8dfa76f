use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::view::{self, ListingCard};
use bazaar_core::models::{CreateUserRequest, CreateUserResponse, LoginRequest, Session};
use bazaar_core::TimeWindow;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

/// Page root: the auth forms and the listings feed. The two views are
/// independent; they only share the configuration value.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();

        html! {
            <div class="container">
                <h1>{ "Bazaar" }</h1>

                <AuthView config={config.clone()} />
                <ListingsView {config} />
            </div>
        }
    }
}

// ==================== Лента объявлений ====================

pub enum ListingsMsg {
    Loaded(Vec<ListingCard>),
    Failed(String),
}

enum ListingsState {
    Loading,
    Loaded(Vec<ListingCard>),
    Failed,
}

/// Fetches the trailing 30-day listings window once on mount and renders
/// one card per listing. No refresh, no pagination.
pub struct ListingsView {
    state: ListingsState,
}

impl Component for ListingsView {
    type Message = ListingsMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ApiClient::new(ctx.props().config.api_base.clone());
        let link = ctx.link().clone();

        spawn_local(async move {
            let window = TimeWindow::last_30_days();
            match api.get_listings(&window).await {
                Ok(listings) => {
                    link.send_message(ListingsMsg::Loaded(view::listing_cards(&listings)))
                }
                Err(e) => link.send_message(ListingsMsg::Failed(e)),
            }
        });

        Self {
            state: ListingsState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ListingsMsg::Loaded(cards) => {
                self.state = ListingsState::Loaded(cards);
                true
            }
            ListingsMsg::Failed(body) => {
                log::error!("Failed to fetch listings: {}", body);
                self.state = ListingsState::Failed;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div id="listingsContainer" class="row">
                {
                    match &self.state {
                        ListingsState::Loading => html! {},
                        ListingsState::Failed => html! {
                            <div class="text-danger">{ view::LISTINGS_FAILED }</div>
                        },
                        ListingsState::Loaded(cards) if cards.is_empty() => html! {
                            <div class="text-muted">{ view::NO_LISTINGS }</div>
                        },
                        ListingsState::Loaded(cards) => html! {
                            { for cards.iter().map(view_card) }
                        },
                    }
                }
            </div>
        }
    }
}

fn view_card(card: &ListingCard) -> Html {
    html! {
        <div class="col-md-4" key={card.listing_id}>
            <div class="card mb-3 p-2">
                <div class="d-flex align-items-center">
                    if let Some(url) = &card.photo_url {
                        <img src={url.clone()} class="img-fluid rounded" style="max-width: 100px;" />
                    }
                    <div class="ms-2">
                        <h6 class="mb-1">{ &card.title }</h6>
                        <p class="mb-1 text-muted">{ &card.price_label }</p>
                        <small class="text-muted">{ format!("By: {}", card.seller) }</small>
                    </div>
                </div>
            </div>
        </div>
    }
}

// ==================== Вход и регистрация ====================

pub enum AuthMsg {
    // Login form
    UpdateEmail(String),
    UpdatePassword(String),
    SubmitLogin,
    LoginDone(Result<Option<Session>, String>),

    // Creation form
    ToggleSignup,
    UpdateUsername(String),
    UpdateNewEmail(String),
    UpdateNewPassword(String),
    UpdateConfirmPassword(String),
    SubmitSignup,
    SignupDone(Result<CreateUserResponse, String>),
}

/// Login and account-creation forms. Each form disables its submit
/// control while its request is in flight, so at most one request per
/// form is ever outstanding.
pub struct AuthView {
    api: ApiClient,

    // Login form
    email: String,
    password: String,
    login_error: Option<String>,
    logged_in: bool,
    login_busy: bool,

    // Creation form
    show_signup: bool,
    username: String,
    new_email: String,
    new_password: String,
    confirm_password: String,
    signup_error: Option<String>,
    signup_done: bool,
    signup_busy: bool,
}

impl Component for AuthView {
    type Message = AuthMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            api: ApiClient::new(ctx.props().config.api_base.clone()),
            email: String::new(),
            password: String::new(),
            login_error: None,
            logged_in: false,
            login_busy: false,
            show_signup: false,
            username: String::new(),
            new_email: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            signup_error: None,
            signup_done: false,
            signup_busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AuthMsg::UpdateEmail(val) => {
                self.email = val;
                true
            }
            AuthMsg::UpdatePassword(val) => {
                self.password = val;
                true
            }

            AuthMsg::SubmitLogin => {
                if self.login_busy {
                    return false;
                }

                self.login_error = None;
                self.login_busy = true;

                let req = LoginRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    let result = api
                        .login(&req)
                        .await
                        .map(|response| Session::from_login(&response, &req.email, &req.password));
                    link.send_message(AuthMsg::LoginDone(result));
                });

                true
            }

            AuthMsg::LoginDone(result) => {
                self.login_busy = false;
                match result {
                    Ok(Some(session)) => {
                        ApiClient::save_session(&session);
                        self.logged_in = true;
                    }
                    Ok(None) => {
                        self.login_error = Some(view::INVALID_CREDENTIALS.to_string());
                    }
                    Err(_) => {
                        self.login_error = Some(view::LOGIN_FAILED.to_string());
                    }
                }
                true
            }

            AuthMsg::ToggleSignup => {
                self.show_signup = !self.show_signup;
                true
            }

            AuthMsg::UpdateUsername(val) => {
                self.username = val;
                true
            }
            AuthMsg::UpdateNewEmail(val) => {
                self.new_email = val;
                true
            }
            AuthMsg::UpdateNewPassword(val) => {
                self.new_password = val;
                true
            }
            AuthMsg::UpdateConfirmPassword(val) => {
                self.confirm_password = val;
                true
            }

            AuthMsg::SubmitSignup => {
                if self.signup_busy {
                    return false;
                }

                self.signup_error = None;

                if !view::passwords_match(&self.new_password, &self.confirm_password) {
                    self.signup_error = Some(view::PASSWORDS_MISMATCH.to_string());
                    return true;
                }

                self.signup_busy = true;

                let req = CreateUserRequest {
                    username: self.username.clone(),
                    email: self.new_email.clone(),
                    password: self.new_password.clone(),
                };

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    link.send_message(AuthMsg::SignupDone(api.create_user(&req).await));
                });

                true
            }

            AuthMsg::SignupDone(result) => {
                self.signup_busy = false;
                match result {
                    Ok(response) if response.success => {
                        self.signup_done = true;
                        self.show_signup = false;
                    }
                    Ok(_) => {
                        self.signup_error = Some(view::CREATE_REJECTED.to_string());
                    }
                    Err(_) => {
                        self.signup_error = Some(view::CREATE_FAILED.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="auth-forms">
                { self.view_login_form(ctx) }
                { self.view_signup_section(ctx) }
            </div>
        }
    }
}

impl AuthView {
    fn view_login_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AuthMsg::SubmitLogin
        });

        html! {
            <form id="loginForm" {onsubmit}>
                <input
                    type="email"
                    id="emailInput"
                    placeholder="Email"
                    value={self.email.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdateEmail(input.value())
                    })}
                />
                <input
                    type="password"
                    id="passwordInput"
                    placeholder="Password"
                    value={self.password.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdatePassword(input.value())
                    })}
                />

                if self.logged_in {
                    <span id="successCheck" class="text-success">{ "✓" }</span>
                } else {
                    <button id="loginButton" type="submit" disabled={self.login_busy}>
                        { "Login" }
                    </button>
                }

                <div id="error" class="text-danger">
                    { self.login_error.clone().unwrap_or_default() }
                </div>
            </form>
        }
    }

    fn view_signup_section(&self, ctx: &Context<Self>) -> Html {
        let ontoggle = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            AuthMsg::ToggleSignup
        });

        html! {
            <div class="signup-section">
                <a href="#" id="newUserLink" onclick={ontoggle}>
                    { "New user? Create an account" }
                </a>

                if self.signup_done {
                    <div class="text-success">{ view::USER_CREATED }</div>
                }

                if self.show_signup {
                    { self.view_signup_form(ctx) }
                }
            </div>
        }
    }

    fn view_signup_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AuthMsg::SubmitSignup
        });

        html! {
            <form id="createUserForm" {onsubmit}>
                <input
                    type="text"
                    id="usernameInput"
                    placeholder="Username"
                    value={self.username.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdateUsername(input.value())
                    })}
                />
                <input
                    type="email"
                    id="newEmailInput"
                    placeholder="Email"
                    value={self.new_email.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdateNewEmail(input.value())
                    })}
                />
                <input
                    type="password"
                    id="newPasswordInput"
                    placeholder="Password"
                    value={self.new_password.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdateNewPassword(input.value())
                    })}
                />
                <input
                    type="password"
                    id="confirmPasswordInput"
                    placeholder="Confirm password"
                    value={self.confirm_password.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        AuthMsg::UpdateConfirmPassword(input.value())
                    })}
                />

                <button type="submit" disabled={self.signup_busy}>
                    { "Create account" }
                </button>

                <div id="createError" class="text-danger">
                    { self.signup_error.clone().unwrap_or_default() }
                </div>
            </form>
        }
    }
}
