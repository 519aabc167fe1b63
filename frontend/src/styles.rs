//! Site-wide stylesheet, mounted once through `stylist::yew::Global`.
//! Component styles live next to their markup.

use stylist::{css, StyleSource};

pub fn global() -> StyleSource {
    css!(r#"
:root {
    --gold: #B4975A;
    --gold-soft: rgba(180, 151, 90, 0.3);
    --zinc: #52525B;
    --black: #0a0a0a;
    --ink: #050505;
    --paper: #FAFAFA;
    --serif: "Playfair Display", Georgia, serif;
    --sans: "Inter", "Helvetica Neue", Arial, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--black);
    color: var(--paper);
    font-family: var(--sans);
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
    cursor: pointer;
}

img {
    max-width: 100%;
    display: block;
}

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section {
    position: relative;
    padding: 7rem 0;
}

.eyebrow {
    font-size: 0.7rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--gold);
}

@keyframes marquee-up {
    from { transform: translateY(0); }
    to { transform: translateY(-50%); }
}

@media (prefers-reduced-motion: reduce) {
    html {
        scroll-behavior: auto;
    }
}
"#)
}
