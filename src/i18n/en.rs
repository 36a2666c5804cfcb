pub const ENTRIES: &[(&str, &str)] = &[
    // Header
    ("header.home", "Home"),
    ("header.listings", "Properties"),
    ("header.about", "About"),
    ("header.contact", "Contact"),
    ("header.admin", "Admin"),
    ("language.switch", "Switch language"),

    // Hero
    ("hero.title", "Simplify Your Property Management"),
    ("hero.subtitle", "EasyLease is the modern platform for property managers, landlords, and tenants. Manage properties, contracts, and payments all in one place."),
    ("hero.cta.primary", "Get Started"),
    ("hero.cta.secondary", "View Properties"),

    // Features
    ("features.title", "Everything You Need to Manage Properties"),
    ("features.subtitle", "A complete solution for modern property management"),
    ("features.properties.title", "Property Management"),
    ("features.properties.description", "Easily manage your property listings with photos, details, and availability status. Keep everything organized in one place."),
    ("features.tenants.title", "Tenant Management"),
    ("features.tenants.description", "Track tenant information, contracts, and rental history. Streamline communication and documentation."),
    ("features.contracts.title", "Contract Management"),
    ("features.contracts.description", "Create and manage rental contracts with all terms, dates, and conditions. Never miss important deadlines."),
    ("features.payments.title", "Payment Tracking"),
    ("features.payments.description", "Monitor rent payments, track overdue amounts, and maintain complete financial records."),
    ("features.owners.title", "Owner Portal"),
    ("features.owners.description", "Property owners can access their portfolio, view reports, and stay updated on their investments."),
    ("features.multilingual.title", "Multi-language Support"),
    ("features.multilingual.description", "Available in English and Spanish, making it accessible to a wider audience."),

    // How it works
    ("howItWorks.title", "How EasyLease Works"),
    ("howItWorks.subtitle", "Get started in three simple steps"),
    ("howItWorks.step1.title", "Add Your Properties"),
    ("howItWorks.step1.description", "Upload property details, photos, and rental terms. Set your pricing and availability."),
    ("howItWorks.step2.title", "Manage Tenants & Contracts"),
    ("howItWorks.step2.description", "Create contracts, onboard tenants, and keep all documentation organized and accessible."),
    ("howItWorks.step3.title", "Track Everything"),
    ("howItWorks.step3.description", "Monitor payments, maintenance requests, and get insights with comprehensive dashboards."),

    // Benefits
    ("benefits.title", "Why Choose EasyLease?"),
    ("benefits.simple.title", "Simple & Intuitive"),
    ("benefits.simple.description", "User-friendly interface designed for property managers of all experience levels."),
    ("benefits.organized.title", "Stay Organized"),
    ("benefits.organized.description", "All your properties, tenants, and contracts in one centralized platform."),
    ("benefits.secure.title", "Secure & Reliable"),
    ("benefits.secure.description", "Your data is protected with industry-standard security measures."),
    ("benefits.accessible.title", "Access Anywhere"),
    ("benefits.accessible.description", "Manage your properties from any device, anywhere, anytime."),

    // CTA
    ("cta.title", "Ready to Simplify Your Property Management?"),
    ("cta.subtitle", "Join property managers who trust EasyLease"),
    ("cta.button", "Get Started Today"),

    // Mobile app
    ("mobileApp.title", "Manage Everything from Your Mobile Device"),
    ("mobileApp.subtitle", "EasyLease is a native mobile application available for iOS and Android"),
    ("mobileApp.feature1.title", "Native Mobile App"),
    ("mobileApp.feature1.description", "Built with React Native for smooth, native performance on both platforms"),
    ("mobileApp.feature2.title", "Offline Capable"),
    ("mobileApp.feature2.description", "Access your data even without internet connection"),
    ("mobileApp.feature3.title", "Real-time Updates"),
    ("mobileApp.feature3.description", "Get instant notifications about payments, contracts, and maintenance"),
    ("mobileApp.feature4.title", "Secure Storage"),
    ("mobileApp.feature4.description", "All your data is encrypted and securely stored on your device"),

    // Registration
    ("register.title", "Create Your Account"),
    ("register.subtitle", "Join EasyLease and start managing your properties today"),
    ("register.role.label", "I am a"),
    ("register.role.manager", "Property Manager"),
    ("register.role.owner", "Property Owner"),
    ("register.name", "Full Name"),
    ("register.email", "Email Address"),
    ("register.phone", "Phone Number"),
    ("register.companyName", "Company Name"),
    ("register.submit", "Create Account"),
    ("register.success", "Account created successfully!"),
    ("register.error", "Error creating account. Please try again."),
    ("register.required", "Name and email are required."),

    // Footer
    ("footer.tagline", "Simplifying property management"),
    ("footer.rights", "All rights reserved."),
    ("footer.product", "Product"),
    ("footer.company", "Company"),
    ("footer.support", "Support"),
    ("footer.features", "Features"),
    ("footer.pricing", "Pricing"),
    ("footer.about", "About Us"),
    ("footer.blog", "Blog"),
    ("footer.help", "Help Center"),
    ("footer.contact", "Contact"),

    // Listings
    ("listings.title", "Available Rooms"),
    ("listings.subtitle", "Find the perfect room for you"),
    ("listings.found.one", "1 room found"),
    ("listings.found.many", "{count} rooms found"),
    ("listings.none", "No rooms match your search"),
    ("listings.empty.title", "No results"),
    ("listings.empty.body", "Try adjusting your search filters or check back later."),
    ("listings.empty.cta", "See all rooms"),
    ("listings.error", "Error loading rooms:"),
    ("error.api_hint", "Make sure the API is running at {url}"),

    // Filters
    ("filters.title", "Filter rooms"),
    ("filters.suburb", "Suburb"),
    ("filters.suburb.placeholder", "e.g. Carlton, Fitzroy..."),
    ("filters.room_type", "Room type"),
    ("filters.room_type.any", "Any type"),
    ("filters.min_price", "Min price"),
    ("filters.max_price", "Max price"),
    ("filters.apply", "Apply filters"),
    ("filters.clear", "Clear filters"),
    ("filters.active", "Active filters: {count}"),

    // Room types
    ("room.master", "Master"),
    ("room.double", "Double"),
    ("room.single", "Single"),
    ("room.other", "Room"),

    // Listing card
    ("card.per_week", "/week"),
    ("card.bond", "Bond:"),
    ("card.bills_included", "✓ Bills included"),
    ("card.min_term", "{weeks} wk min."),
    ("card.details", "View details"),
    ("card.contact", "Contact"),
    ("card.no_image", "No image"),

    // Listing detail
    ("detail.back", "← Back to rooms"),
    ("detail.error", "Error loading the room:"),
    ("detail.key_features", "Key features"),
    ("detail.house_features", "House features"),
    ("detail.rules", "House rules"),
    ("detail.preferred_tenants", "Preferred tenants"),
    ("detail.bills_included", "Bills included"),
    ("detail.bills_excluded", "Bills not included"),
    ("detail.available_from", "Available from:"),
    ("detail.no_images", "No images available"),
    ("detail.contract.title", "Contract terms"),
    ("detail.contract.weekly_rent", "Weekly rent"),
    ("detail.contract.bond", "Bond"),
    ("detail.contract.period", "Period"),
    ("detail.contract.frequency", "Payment frequency"),
    ("gallery.previous", "Previous image"),
    ("gallery.next", "Next image"),

    // Contact form
    ("contact.title", "Contact the owner"),
    ("contact.name", "Name *"),
    ("contact.name.placeholder", "Your full name"),
    ("contact.email", "Email *"),
    ("contact.phone", "Phone"),
    ("contact.message", "Message"),
    ("contact.message.default", "Hi, I'm interested in the room \"{title}\". Could we talk?"),
    ("contact.submit", "Send message"),
    ("contact.sending", "Sending..."),
    ("contact.sent.title", "Message sent!"),
    ("contact.sent.body", "We have received your enquiry. The owner will contact you soon."),
    ("contact.again", "Send another message"),
    ("contact.consent", "By sending this form you agree that the owner may contact you."),
    ("contact.error", "Error sending the message"),
    ("contact.required", "Please enter your name and email."),

    // Admin
    ("admin.nav.listings", "Listings"),
    ("admin.nav.leads", "Leads"),
    ("admin.nav.partners", "Partners"),
    ("admin.tab.all", "All"),
    ("admin.updating", "Updating..."),
    ("admin.listing_id", "Listing ID:"),
    ("admin.registered", "Registered:"),
    ("admin.leads.title", "Lead Management"),
    ("admin.leads.subtitle", "Manage contacts and enquiries from prospective tenants"),
    ("admin.leads.error", "Error loading leads:"),
    ("admin.leads.empty.title", "No leads"),
    ("admin.leads.empty.body", "There are no tenant enquiries at the moment."),
    ("admin.leads.empty.body_status", "There are no leads with status \"{status}\" at the moment."),
    ("admin.leads.empty.cta", "See available rooms"),
    ("admin.partners.title", "Partner Management"),
    ("admin.partners.subtitle", "Manage property owners and real-estate partners"),
    ("admin.partners.error", "Error loading partners:"),
    ("admin.partners.empty.title", "No partners"),
    ("admin.partners.empty.body", "There are no registered partners at the moment."),
    ("admin.partners.empty.body_status", "There are no partners with status \"{status}\" at the moment."),
    ("admin.listings.title", "Listing Management"),
    ("admin.listings.new", "New listing"),
    ("admin.listings.edit", "Edit listing"),
    ("admin.listings.delete", "Delete"),
    ("admin.listings.confirm_delete", "Delete this listing?"),
    ("admin.listings.save", "Save listing"),
    ("admin.listings.empty", "There are no listings yet."),
    ("admin.listings.error", "Error loading listings:"),
    ("admin.listings.one_per_line", "One per line"),
    ("listing.field.title", "Title"),
    ("listing.field.slug", "Slug"),
    ("listing.field.price_per_week", "Price per week"),
    ("listing.field.bond", "Bond"),
    ("listing.field.bills_included", "Bills included"),
    ("listing.field.address", "Address"),
    ("listing.field.suburb", "Suburb"),
    ("listing.field.room_type", "Room type"),
    ("listing.field.min_term_weeks", "Minimum term (weeks)"),
    ("listing.field.images", "Image URLs"),
    ("listing.field.house_features", "House features"),
    ("listing.field.rules", "Rules"),
    ("listing.field.preferred_tenants", "Preferred tenants"),
    ("listing.field.locale", "Language"),

    // Statuses
    ("lead.status.new", "New"),
    ("lead.status.contacted", "Contacted"),
    ("lead.status.converted", "Converted"),
    ("lead.status.discarded", "Discarded"),
    ("lead.action.contacted", "Mark as contacted"),
    ("lead.action.converted", "Mark as converted"),
    ("lead.action.discarded", "Discard"),
    ("lead.action.new", "Mark as new"),
    ("partner.status.pending", "Pending"),
    ("partner.status.active", "Active"),
    ("partner.status.inactive", "Inactive"),
    ("partner.action.active", "Activate"),
    ("partner.action.inactive", "Deactivate"),
    ("partner.action.pending", "Mark as pending"),
    ("status.unknown", "Unknown"),
    ("status.update_failed", "Error updating the status"),

    // Not found / errors / health
    ("notfound.title", "404 - Page not found"),
    ("notfound.body", "Sorry, the page you are looking for does not exist or has been moved."),
    ("notfound.home", "Go home"),
    ("notfound.listings", "See all rooms"),
    ("error.title", "Something went wrong"),
    ("health.title", "API status"),
    ("health.ok", "The API is up"),
    ("health.down", "The API is not responding"),
    ("health.timestamp", "Checked at"),
];
