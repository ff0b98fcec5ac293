//! CSS for the landing page.
//!
//! Inlined into the pre-rendered document and injected by the browser
//! bundle, so both outputs look the same without a separate stylesheet.
//!
//! Layout notes:
//! - the navbar collapses behind `.menu-toggle` under 768px; `.nav-links.open`
//!   shows the list
//! - `.carousel-content` is the swipe surface; `touch-action: pan-y` keeps
//!   vertical page scrolling while horizontal drags go to the carousel

/// Complete stylesheet - green agricultural palette.
pub const LANDING_CSS: &str = r#"
:root {
    --green-dark: #1b5e20;
    --green: #2e7d32;
    --green-light: #a5d6a7;
    --leaf-bg: #f1f8e9;
    --text: #263238;
    --text-dim: #607d8b;
    --card-bg: #ffffff;
    --radius: 12px;
    --shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    color: var(--text);
    background: var(--leaf-bg);
    line-height: 1.6;
}

section {
    padding: 96px 24px 64px;
    text-align: center;
    scroll-margin-top: 64px;
}

section h2 {
    font-size: 2rem;
    color: var(--green-dark);
    margin-bottom: 32px;
}

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    background: var(--card-bg);
    box-shadow: var(--shadow);
}

.navbar-content {
    max-width: 1100px;
    margin: 0 auto;
    padding: 8px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo img {
    height: 50px;
    display: block;
}

.nav-links {
    display: flex;
    gap: 24px;
}

.nav-links a {
    color: var(--green-dark);
    text-decoration: none;
    font-weight: 600;
}

.nav-links a:hover {
    color: var(--green);
}

.menu-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 8px;
}

.menu-toggle .bar {
    width: 24px;
    height: 3px;
    background: var(--green-dark);
    border-radius: 2px;
    transition: transform 0.2s ease, opacity 0.2s ease;
}

.menu-toggle.active .bar:nth-child(1) {
    transform: translateY(8px) rotate(45deg);
}

.menu-toggle.active .bar:nth-child(2) {
    opacity: 0;
}

.menu-toggle.active .bar:nth-child(3) {
    transform: translateY(-8px) rotate(-45deg);
}

/* Hero */
.hero {
    min-height: 80vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 20px;
    background: linear-gradient(160deg, var(--green-dark), var(--green));
    color: #ffffff;
}

.hero h1 {
    font-size: 2.8rem;
}

.hero p {
    font-size: 1.2rem;
    max-width: 640px;
}

.download-btn {
    display: inline-block;
    padding: 14px 32px;
    border-radius: 999px;
    background: #ffffff;
    color: var(--green-dark);
    font-weight: 700;
    text-decoration: none;
    transition: transform 0.15s ease;
}

.download-btn:hover {
    transform: translateY(-2px);
}

.qr-code img {
    width: 140px;
    height: 140px;
    border-radius: 8px;
    background: #ffffff;
    padding: 8px;
}

.qr-code p {
    font-size: 0.9rem;
    opacity: 0.85;
}

/* Project details */
.project-content {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
    text-align: left;
}

.detail-card,
.feature-card {
    background: var(--card-bg);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    padding: 24px;
}

.detail-card h3,
.feature-card h3 {
    color: var(--green);
    margin-bottom: 12px;
}

.detail-card ul {
    padding-left: 20px;
}

/* Carousel */
.carousel {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 16px;
}

.carousel-content {
    touch-action: pan-y;
    user-select: none;
}

.carousel-content img {
    max-height: 560px;
    max-width: 100%;
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}

.carousel-btn {
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: none;
    background: var(--green);
    color: #ffffff;
    font-size: 1.6rem;
    cursor: pointer;
}

.carousel-dots {
    display: flex;
    justify-content: center;
    gap: 10px;
    margin-top: 20px;
}

.dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: none;
    background: var(--green-light);
    cursor: pointer;
}

.dot.active {
    background: var(--green-dark);
    transform: scale(1.25);
}

/* Features */
.features-grid {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}

.feature-card p {
    color: var(--text-dim);
}

@media (max-width: 768px) {
    .menu-toggle {
        display: flex;
    }

    .nav-links {
        display: none;
        position: absolute;
        top: 66px;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 0;
        background: var(--card-bg);
        box-shadow: var(--shadow);
    }

    .nav-links.open {
        display: flex;
    }

    .nav-links a {
        padding: 14px 24px;
        border-top: 1px solid var(--leaf-bg);
    }

    .carousel-btn {
        display: none;
    }

    .hero h1 {
        font-size: 2rem;
    }
}
"#;
