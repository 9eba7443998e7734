use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

const LEGAL_CSS: &str = r#"
    .legal-content {
        max-width: 720px;
        margin: 0 auto;
        color: #3a2a33;
    }
    .legal-content h1 {
        color: #d6336c;
        margin-bottom: 2rem;
    }
    .legal-content section {
        background: #fff;
        border-radius: 12px;
        padding: 1.5rem 2rem;
        margin: 1rem 0;
        box-shadow: 0 4px 16px rgba(214, 51, 108, 0.08);
    }
    .legal-content h2 {
        color: #d6336c;
        font-size: 1.2rem;
    }
    .legal-content p, .legal-content li {
        color: #5b4450;
        line-height: 1.6;
    }
    .legal-links {
        margin-top: 2rem;
        text-align: center;
    }
    .legal-links a {
        color: #d6336c;
        text-decoration: none;
    }
"#;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
        </div>
    }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <div class="legal-content terms">
            <style>{LEGAL_CSS}</style>
            <h1>{"Terms of Use"}</h1>

            <section>
                <h2>{"1. The pages"}</h2>
                <p>{"The promposal and invite pages are provided for fun. Use them kindly and take no for an answer, even when the button runs away."}</p>
            </section>

            <section>
                <h2>{"2. Custom pages"}</h2>
                <p>{"Booking requests are not binding until we confirm them by email."}</p>
            </section>

            <section>
                <h2>{"3. Content"}</h2>
                <ul>
                    <li>{"Do not use the pages to harass anyone."}</li>
                    <li>{"Media you send us for a custom page must be yours to share."}</li>
                </ul>
            </section>

            {legal_links()}
        </div>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <div class="legal-content privacy">
            <style>{LEGAL_CSS}</style>
            <h1>{"Privacy"}</h1>

            <section>
                <h2>{"1. What we store"}</h2>
                <p>{"Nothing. The pages run entirely in your browser and keep no record of which button you pressed."}</p>
            </section>

            <section>
                <h2>{"2. Email"}</h2>
                <p>{"If you write to us, we use your address only to reply."}</p>
            </section>

            {legal_links()}
        </div>
    }
}
