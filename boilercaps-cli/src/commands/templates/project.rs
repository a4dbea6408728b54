//! File contents written into generated projects.
//!
//! These are fixed strings; only the directory they land in varies.

/// `.env` — one empty connection string, read by [`CONNECTION_JS`].
pub const ENV_FILE: &str = r#"
CONNECTION_STRING="";
"#;

/// `models/connection.js` — connects mongoose using `CONNECTION_STRING`.
pub const CONNECTION_JS: &str = r#"
const mongoose = require('mongoose');

const connectionString = process.env.CONNECTION_STRING;

mongoose.connect(connectionString, { connectTimeoutMS: 2000 })
  .then(() => console.log('Database connected'))
  .catch(error => console.error(error));
"#;

/// `vercel.json` — a single `@vercel/node` build of `app.js` with a
/// catch-all route to it.
pub const VERCEL_JSON: &str = r#"
{
  "version": 2,
  "builds": [
    {
      "src": "app.js",
      "use": "@vercel/node"
    }
  ],
  "routes": [
    {
      "src": "/(.*)",
      "dest": "app.js"
    }
  ]
}
"#;
