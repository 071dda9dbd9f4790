//! Embedded stylesheets for the card text classes. The animated and static
//! variants differ only in the fade-in properties.

pub const STYLE: &str = "\
.header {
  font: 600 18px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #2f80ed;
  animation: fade-in 0.8s ease-in-out forwards;
}
.subheader {
  font: 500 12px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #666666;
  animation: fade-in 0.8s ease-in-out forwards;
}
.lang-name {
  font: 400 11px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #333333;
  animation: fade-in 0.8s ease-in-out forwards;
}
@keyframes fade-in {
  from {
    opacity: 0;
  }
  to {
    opacity: 1;
  }
}
";

pub const STYLE_NO_ANIMATION: &str = "\
.header {
  font: 600 18px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #2f80ed;
}
.subheader {
  font: 500 12px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #666666;
}
.lang-name {
  font: 400 11px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: #333333;
}
";
