//! Server-rendered HTML pages.
//!
//! Each page is a plain function from its context to markup. Every value
//! coming from the database or the request goes through [`escape`].

use restaurante_types::{Empleado, Sucursal};
use std::fmt::Write;

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Restaurante</title>
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <nav>
        <a href="/">Inicio</a>
        <a href="/web/sucursales">Sucursales</a>
    </nav>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Landing page.
pub fn index_page() -> String {
    layout(
        "Inicio",
        r#"        <h1>Administracion de Restaurante</h1>
        <p>Gestion de sucursales y empleados.</p>
        <ul>
            <li><a href="/web/sucursales">Ver sucursales</a></li>
            <li><a href="/web/sucursales/nueva">Registrar sucursal</a></li>
        </ul>"#,
    )
}

/// Listing of every branch.
pub fn sucursales_page(sucursales: &[Sucursal]) -> String {
    let mut body = String::from(
        "        <h1>Sucursales</h1>\n        <p><a href=\"/web/sucursales/nueva\">Nueva sucursal</a></p>\n",
    );

    if sucursales.is_empty() {
        body.push_str("        <p>No hay sucursales registradas.</p>");
        return layout("Sucursales", &body);
    }

    body.push_str(
        "        <table>\n            <tr><th>ID</th><th>Nombre</th><th>Empleados</th><th>Proveedores</th><th>Pedidos</th></tr>\n",
    );
    for s in sucursales {
        let _ = writeln!(
            body,
            "            <tr><td>{id}</td><td><a href=\"/web/sucursales/{id}\">{nombre}</a></td><td>{emp}</td><td>{prov}</td><td>{ped}</td></tr>",
            id = s.id,
            nombre = escape(&s.nombre),
            emp = s.num_empleados,
            prov = s.num_proveedores,
            ped = s.num_pedidos,
        );
    }
    body.push_str("        </table>");

    layout("Sucursales", &body)
}

/// Form for registering a new branch.
pub fn sucursal_form_page() -> String {
    layout(
        "Nueva sucursal",
        r#"        <h1>Nueva sucursal</h1>
        <form method="post" action="/web/sucursales/nueva">
            <label for="nombre">Nombre</label>
            <input type="text" id="nombre" name="nombre" required>
            <label for="num_empleados">Numero de empleados</label>
            <input type="number" id="num_empleados" name="num_empleados" value="0" min="0">
            <button type="submit">Guardar</button>
        </form>"#,
    )
}

/// Detail of one branch with its staff.
pub fn sucursal_detalle_page(sucursal: &Sucursal, empleados: &[Empleado]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "        <h1>{nombre}</h1>\n        <dl>\n            <dt>Empleados</dt><dd>{emp}</dd>\n            <dt>Proveedores</dt><dd>{prov}</dd>\n            <dt>Pedidos</dt><dd>{ped}</dd>\n        </dl>\n        <h2>Empleados</h2>\n",
        nombre = escape(&sucursal.nombre),
        emp = sucursal.num_empleados,
        prov = sucursal.num_proveedores,
        ped = sucursal.num_pedidos,
    );

    if empleados.is_empty() {
        body.push_str("        <p>Esta sucursal no tiene empleados.</p>");
    } else {
        body.push_str(
            "        <table>\n            <tr><th>ID</th><th>Nombre</th><th>Puesto</th><th>Fecha de contratacion</th></tr>\n",
        );
        for e in empleados {
            let _ = writeln!(
                body,
                "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                e.id,
                escape(&e.nombre),
                escape(&e.puesto),
                e.fecha_contratacion.format("%Y-%m-%d"),
            );
        }
        body.push_str("        </table>");
    }

    layout(&sucursal.nombre, &body)
}

/// Error page carrying a failure message.
pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            "        <h1>Error</h1>\n        <p class=\"error\">{}</p>\n        <p><a href=\"/web/sucursales\">Volver a sucursales</a></p>",
            escape(message)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn centro() -> Sucursal {
        Sucursal {
            id: 1,
            nombre: "Centro".to_string(),
            num_empleados: 1,
            num_proveedores: 0,
            num_pedidos: 0,
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;y&#x27;"
        );
    }

    #[test]
    fn listing_links_each_branch() {
        let html = sucursales_page(&[centro()]);
        assert!(html.contains(r#"<a href="/web/sucursales/1">Centro</a>"#));
    }

    #[test]
    fn empty_listing_says_so() {
        let html = sucursales_page(&[]);
        assert!(html.contains("No hay sucursales registradas."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn detail_lists_employees() {
        let empleados = vec![Empleado {
            id: 1,
            nombre: "Ana".to_string(),
            puesto: "Mesera".to_string(),
            fecha_contratacion: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            sucursal_id: 1,
        }];
        let html = sucursal_detalle_page(&centro(), &empleados);
        assert!(html.contains("<h1>Centro</h1>"));
        assert!(html.contains("<td>Ana</td><td>Mesera</td><td>2024-01-10</td>"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page("<b>boom</b>");
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
        assert!(!html.contains("<b>boom</b>"));
    }
}
