pub const ENTRIES: &[(&str, &str)] = &[
    // Header
    ("header.home", "Inicio"),
    ("header.listings", "Propiedades"),
    ("header.about", "Nosotros"),
    ("header.contact", "Contacto"),
    ("header.admin", "Administración"),
    ("language.switch", "Cambiar idioma"),

    // Hero
    ("hero.title", "Simplifica la Gestión de tus Propiedades"),
    ("hero.subtitle", "EasyLease es la plataforma moderna para administradores de propiedades, propietarios e inquilinos. Gestiona propiedades, contratos y pagos en un solo lugar."),
    ("hero.cta.primary", "Comenzar"),
    ("hero.cta.secondary", "Ver Propiedades"),

    // Features
    ("features.title", "Todo lo que Necesitas para Gestionar Propiedades"),
    ("features.subtitle", "Una solución completa para la gestión moderna de propiedades"),
    ("features.properties.title", "Gestión de Propiedades"),
    ("features.properties.description", "Administra fácilmente tus listados de propiedades con fotos, detalles y estado de disponibilidad. Mantén todo organizado en un solo lugar."),
    ("features.tenants.title", "Gestión de Inquilinos"),
    ("features.tenants.description", "Rastrea información de inquilinos, contratos e historial de alquiler. Optimiza la comunicación y documentación."),
    ("features.contracts.title", "Gestión de Contratos"),
    ("features.contracts.description", "Crea y gestiona contratos de alquiler con todos los términos, fechas y condiciones. Nunca pierdas fechas importantes."),
    ("features.payments.title", "Seguimiento de Pagos"),
    ("features.payments.description", "Monitorea pagos de alquiler, rastrea montos vencidos y mantén registros financieros completos."),
    ("features.owners.title", "Portal de Propietarios"),
    ("features.owners.description", "Los propietarios pueden acceder a su portafolio, ver reportes y mantenerse actualizados sobre sus inversiones."),
    ("features.multilingual.title", "Soporte Multi-idioma"),
    ("features.multilingual.description", "Disponible en inglés y español, haciéndolo accesible para una audiencia más amplia."),

    // How it works
    ("howItWorks.title", "Cómo Funciona EasyLease"),
    ("howItWorks.subtitle", "Comienza en tres simples pasos"),
    ("howItWorks.step1.title", "Agrega tus Propiedades"),
    ("howItWorks.step1.description", "Sube detalles de propiedades, fotos y términos de alquiler. Establece tus precios y disponibilidad."),
    ("howItWorks.step2.title", "Gestiona Inquilinos y Contratos"),
    ("howItWorks.step2.description", "Crea contratos, incorpora inquilinos y mantén toda la documentación organizada y accesible."),
    ("howItWorks.step3.title", "Rastrea Todo"),
    ("howItWorks.step3.description", "Monitorea pagos, solicitudes de mantenimiento y obtén información con paneles completos."),

    // Benefits
    ("benefits.title", "¿Por Qué Elegir EasyLease?"),
    ("benefits.simple.title", "Simple e Intuitivo"),
    ("benefits.simple.description", "Interfaz fácil de usar diseñada para administradores de propiedades de todos los niveles."),
    ("benefits.organized.title", "Mantente Organizado"),
    ("benefits.organized.description", "Todas tus propiedades, inquilinos y contratos en una plataforma centralizada."),
    ("benefits.secure.title", "Seguro y Confiable"),
    ("benefits.secure.description", "Tus datos están protegidos con medidas de seguridad estándar de la industria."),
    ("benefits.accessible.title", "Acceso desde Cualquier Lugar"),
    ("benefits.accessible.description", "Gestiona tus propiedades desde cualquier dispositivo, en cualquier lugar, en cualquier momento."),

    // CTA
    ("cta.title", "¿Listo para Simplificar la Gestión de tus Propiedades?"),
    ("cta.subtitle", "Únete a los administradores que confían en EasyLease"),
    ("cta.button", "Comenzar Hoy"),

    // Mobile app
    ("mobileApp.title", "Gestiona Todo desde tu Dispositivo Móvil"),
    ("mobileApp.subtitle", "EasyLease es una aplicación móvil nativa disponible para iOS y Android"),
    ("mobileApp.feature1.title", "App Móvil Nativa"),
    ("mobileApp.feature1.description", "Construida con React Native para un rendimiento nativo y fluido en ambas plataformas"),
    ("mobileApp.feature2.title", "Funciona Sin Conexión"),
    ("mobileApp.feature2.description", "Accede a tus datos incluso sin conexión a internet"),
    ("mobileApp.feature3.title", "Actualizaciones en Tiempo Real"),
    ("mobileApp.feature3.description", "Recibe notificaciones instantáneas sobre pagos, contratos y mantenimiento"),
    ("mobileApp.feature4.title", "Almacenamiento Seguro"),
    ("mobileApp.feature4.description", "Todos tus datos están encriptados y almacenados de forma segura en tu dispositivo"),

    // Registration
    ("register.title", "Crea tu Cuenta"),
    ("register.subtitle", "Únete a EasyLease y comienza a gestionar tus propiedades hoy"),
    ("register.role.label", "Soy un"),
    ("register.role.manager", "Administrador de Propiedades"),
    ("register.role.owner", "Propietario"),
    ("register.name", "Nombre Completo"),
    ("register.email", "Correo Electrónico"),
    ("register.phone", "Número de Teléfono"),
    ("register.companyName", "Nombre de la Empresa"),
    ("register.submit", "Crear Cuenta"),
    ("register.success", "¡Cuenta creada exitosamente!"),
    ("register.error", "Error al crear la cuenta. Por favor intenta de nuevo."),
    ("register.required", "El nombre y el email son obligatorios."),

    // Footer
    ("footer.tagline", "Simplificando la gestión de propiedades"),
    ("footer.rights", "Todos los derechos reservados."),
    ("footer.product", "Producto"),
    ("footer.company", "Compañía"),
    ("footer.support", "Soporte"),
    ("footer.features", "Características"),
    ("footer.pricing", "Precios"),
    ("footer.about", "Nosotros"),
    ("footer.blog", "Blog"),
    ("footer.help", "Centro de Ayuda"),
    ("footer.contact", "Contacto"),

    // Listings
    ("listings.title", "Habitaciones Disponibles"),
    ("listings.subtitle", "Encuentra la habitación perfecta para ti"),
    ("listings.found.one", "1 habitación encontrada"),
    ("listings.found.many", "{count} habitaciones encontradas"),
    ("listings.none", "No hay habitaciones que coincidan con tu búsqueda"),
    ("listings.empty.title", "No hay resultados"),
    ("listings.empty.body", "Intenta ajustar tus filtros de búsqueda o revisar más tarde."),
    ("listings.empty.cta", "Ver todas las habitaciones"),
    ("listings.error", "Error al cargar las habitaciones:"),
    ("error.api_hint", "Asegúrate de que la API esté ejecutándose en {url}"),

    // Filters
    ("filters.title", "Filtrar habitaciones"),
    ("filters.suburb", "Barrio"),
    ("filters.suburb.placeholder", "ej: Carlton, Fitzroy..."),
    ("filters.room_type", "Tipo de habitación"),
    ("filters.room_type.any", "Cualquier tipo"),
    ("filters.min_price", "Precio mínimo"),
    ("filters.max_price", "Precio máximo"),
    ("filters.apply", "Aplicar filtros"),
    ("filters.clear", "Limpiar filtros"),
    ("filters.active", "Filtros activos: {count}"),

    // Room types
    ("room.master", "Principal"),
    ("room.double", "Doble"),
    ("room.single", "Individual"),
    ("room.other", "Habitación"),

    // Listing card
    ("card.per_week", "/semana"),
    ("card.bond", "Depósito:"),
    ("card.bills_included", "✓ Servicios incluidos"),
    ("card.min_term", "{weeks} sem. mín."),
    ("card.details", "Ver detalles"),
    ("card.contact", "Contactar"),
    ("card.no_image", "Sin imagen"),

    // Listing detail
    ("detail.back", "← Volver a las habitaciones"),
    ("detail.error", "Error al cargar la habitación:"),
    ("detail.key_features", "Características principales"),
    ("detail.house_features", "Características de la casa"),
    ("detail.rules", "Reglas de la casa"),
    ("detail.preferred_tenants", "Inquilinos preferidos"),
    ("detail.bills_included", "Servicios incluidos"),
    ("detail.bills_excluded", "Servicios no incluidos"),
    ("detail.available_from", "Disponible desde:"),
    ("detail.no_images", "Sin imágenes disponibles"),
    ("detail.contract.title", "Condiciones del contrato"),
    ("detail.contract.weekly_rent", "Alquiler semanal"),
    ("detail.contract.bond", "Depósito"),
    ("detail.contract.period", "Periodo"),
    ("detail.contract.frequency", "Frecuencia de pago"),
    ("gallery.previous", "Imagen anterior"),
    ("gallery.next", "Imagen siguiente"),

    // Contact form
    ("contact.title", "Contactar propietario"),
    ("contact.name", "Nombre *"),
    ("contact.name.placeholder", "Tu nombre completo"),
    ("contact.email", "Email *"),
    ("contact.phone", "Teléfono"),
    ("contact.message", "Mensaje"),
    ("contact.message.default", "Hola, me interesa la habitación \"{title}\". ¿Podríamos hablar?"),
    ("contact.submit", "Enviar mensaje"),
    ("contact.sending", "Enviando..."),
    ("contact.sent.title", "¡Mensaje enviado!"),
    ("contact.sent.body", "Hemos recibido tu consulta. El propietario se pondrá en contacto contigo pronto."),
    ("contact.again", "Enviar otro mensaje"),
    ("contact.consent", "Al enviar este formulario, aceptas que el propietario se ponga en contacto contigo."),
    ("contact.error", "Error al enviar el mensaje"),
    ("contact.required", "Por favor introduce tu nombre y email."),

    // Admin
    ("admin.nav.listings", "Habitaciones"),
    ("admin.nav.leads", "Leads"),
    ("admin.nav.partners", "Partners"),
    ("admin.tab.all", "Todos"),
    ("admin.updating", "Actualizando..."),
    ("admin.listing_id", "ID de habitación:"),
    ("admin.registered", "Registrado:"),
    ("admin.leads.title", "Gestión de Leads"),
    ("admin.leads.subtitle", "Gestiona los contactos y consultas de potenciales inquilinos"),
    ("admin.leads.error", "Error al cargar los leads:"),
    ("admin.leads.empty.title", "No hay leads"),
    ("admin.leads.empty.body", "No hay consultas de inquilinos en este momento."),
    ("admin.leads.empty.body_status", "No hay leads con estado \"{status}\" en este momento."),
    ("admin.leads.empty.cta", "Ver habitaciones disponibles"),
    ("admin.partners.title", "Gestión de Partners"),
    ("admin.partners.subtitle", "Gestiona los propietarios y socios inmobiliarios"),
    ("admin.partners.error", "Error al cargar los partners:"),
    ("admin.partners.empty.title", "No hay partners"),
    ("admin.partners.empty.body", "No hay socios inmobiliarios registrados en este momento."),
    ("admin.partners.empty.body_status", "No hay partners con estado \"{status}\" en este momento."),
    ("admin.listings.title", "Gestión de Habitaciones"),
    ("admin.listings.new", "Nueva habitación"),
    ("admin.listings.edit", "Editar habitación"),
    ("admin.listings.delete", "Eliminar"),
    ("admin.listings.confirm_delete", "¿Eliminar esta habitación?"),
    ("admin.listings.save", "Guardar habitación"),
    ("admin.listings.empty", "Todavía no hay habitaciones."),
    ("admin.listings.error", "Error al cargar las habitaciones:"),
    ("admin.listings.one_per_line", "Uno por línea"),
    ("listing.field.title", "Título"),
    ("listing.field.slug", "Slug"),
    ("listing.field.price_per_week", "Precio por semana"),
    ("listing.field.bond", "Depósito"),
    ("listing.field.bills_included", "Servicios incluidos"),
    ("listing.field.address", "Dirección"),
    ("listing.field.suburb", "Barrio"),
    ("listing.field.room_type", "Tipo de habitación"),
    ("listing.field.min_term_weeks", "Estancia mínima (semanas)"),
    ("listing.field.images", "URLs de imágenes"),
    ("listing.field.house_features", "Características de la casa"),
    ("listing.field.rules", "Reglas"),
    ("listing.field.preferred_tenants", "Inquilinos preferidos"),
    ("listing.field.locale", "Idioma"),

    // Statuses
    ("lead.status.new", "Nuevo"),
    ("lead.status.contacted", "Contactado"),
    ("lead.status.converted", "Convertido"),
    ("lead.status.discarded", "Descartado"),
    ("lead.action.contacted", "Marcar como contactado"),
    ("lead.action.converted", "Marcar como convertido"),
    ("lead.action.discarded", "Descartar"),
    ("lead.action.new", "Marcar como nuevo"),
    ("partner.status.pending", "Pendiente"),
    ("partner.status.active", "Activo"),
    ("partner.status.inactive", "Inactivo"),
    ("partner.action.active", "Activar"),
    ("partner.action.inactive", "Desactivar"),
    ("partner.action.pending", "Marcar como pendiente"),
    ("status.unknown", "Desconocido"),
    ("status.update_failed", "Error al actualizar el estado"),

    // Not found / errors / health
    ("notfound.title", "404 - Página no encontrada"),
    ("notfound.body", "Lo sentimos, la página que buscas no existe o ha sido movida."),
    ("notfound.home", "Ir al inicio"),
    ("notfound.listings", "Ver todas las habitaciones"),
    ("error.title", "Algo salió mal"),
    ("health.title", "Estado de la API"),
    ("health.ok", "La API está funcionando"),
    ("health.down", "La API no responde"),
    ("health.timestamp", "Comprobado a las"),
];
